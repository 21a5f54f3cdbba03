//! Generic key-paged constructor and lookup adapters
//!
//! All `MockSource` key-paged factories funnel through `KeyedGenerator`;
//! constants and maps are adapted into functions here.

use crate::source::{
    FragmentFn, GeneratorSource, KeyedFactory, Navigator, PageFn, SeparatedSource,
};
use crate::types::{Entry, MaybePage};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Wrap a closure as a header or footer fragment function
pub fn fragment<K, V>(
    f: impl Fn(&K, Option<&[V]>) -> MaybePage<V> + Send + Sync + 'static,
) -> FragmentFn<K, V> {
    Arc::new(f)
}

/// Page function that looks pages up in a map, absent when unmapped
pub fn lookup<K, V>(pages: HashMap<K, Vec<V>>) -> PageFn<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    Arc::new(move |key: &K| pages.get(key).cloned())
}

/// Fragment function that looks fragments up in a map, absent when unmapped
pub fn lookup_fragment<K, V>(fragments: HashMap<K, Vec<V>>) -> FragmentFn<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    Arc::new(move |key: &K, _content: Option<&[V]>| fragments.get(key).cloned())
}

/// Where a decorated source places the key of each page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decoration {
    Header,
    Footer,
}

/// Lift a page function into `Entry` items and decorate every page with its key
pub(crate) fn decorated<K, V>(
    navigator: Navigator<K>,
    page: PageFn<K, V>,
    decoration: Decoration,
) -> KeyedFactory<K, Entry<K, V>>
where
    K: Clone + Send + Sync + 'static,
    V: 'static,
{
    let items: PageFn<K, Entry<K, V>> = Arc::new(move |key: &K| {
        page(key).map(|items| items.into_iter().map(Entry::Item).collect())
    });
    let generator = KeyedGenerator::new(navigator, items);
    match decoration {
        Decoration::Header => generator
            .header(fragment(|key: &K, _| Some(vec![Entry::Header(key.clone())])))
            .build(),
        Decoration::Footer => generator
            .footer(fragment(|key: &K, _| Some(vec![Entry::Footer(key.clone())])))
            .build(),
    }
}

/// One constructor for every key-paged source shape
///
/// Builds a plain generator source unless fragments are configured or the
/// separated form is requested explicitly, in which case absent content is
/// preserved through to fragment merging.
pub struct KeyedGenerator<K, V> {
    navigator: Navigator<K>,
    page: PageFn<K, V>,
    header: Option<FragmentFn<K, V>>,
    footer: Option<FragmentFn<K, V>>,
    separated: bool,
}

impl<K: 'static, V: 'static> KeyedGenerator<K, V> {
    /// Start from a navigator and a page function
    pub fn new(navigator: Navigator<K>, page: PageFn<K, V>) -> Self {
        Self {
            navigator,
            page,
            header: None,
            footer: None,
            separated: false,
        }
    }

    /// Surround pages with a header fragment
    #[must_use]
    pub fn header(mut self, header: FragmentFn<K, V>) -> Self {
        self.header = Some(header);
        self.separated = true;
        self
    }

    /// Surround pages with a footer fragment
    #[must_use]
    pub fn footer(mut self, footer: FragmentFn<K, V>) -> Self {
        self.footer = Some(footer);
        self.separated = true;
        self
    }

    /// Set optional header and footer fragments and use the separated form
    #[must_use]
    pub fn fragments(
        mut self,
        header: Option<FragmentFn<K, V>>,
        footer: Option<FragmentFn<K, V>>,
    ) -> Self {
        self.header = header;
        self.footer = footer;
        self.separated = true;
        self
    }

    /// Build the source and cache it behind a factory
    pub fn build(self) -> KeyedFactory<K, V> {
        if self.separated {
            KeyedFactory::keyed(SeparatedSource::new(
                self.navigator,
                self.page,
                self.header,
                self.footer,
            ))
        } else {
            KeyedFactory::keyed(GeneratorSource::new(self.navigator, self.page))
        }
    }
}
