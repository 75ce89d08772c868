use std::rc::Rc;

/// Reserved category that matches every item.
pub const ALL_CATEGORY: &str = "All";

/// Items that carry a single category tag.
pub trait Categorized {
    fn category(&self) -> &str;
}

pub enum Filter<T> {
    None,
    Category(String),
    Search(String),
    Predicate(Rc<dyn Fn(&T) -> bool>),
}

impl<T> Clone for Filter<T> {
    fn clone(&self) -> Self {
        match self {
            Filter::None => Filter::None,
            Filter::Category(c) => Filter::Category(c.clone()),
            Filter::Search(s) => Filter::Search(s.clone()),
            Filter::Predicate(p) => Filter::Predicate(p.clone()),
        }
    }
}

impl<T> Filter<T> {
    /// Whether this filter can exclude anything at all.
    pub fn is_active(&self) -> bool {
        match self {
            Filter::None => false,
            Filter::Category(c) => c != ALL_CATEGORY,
            Filter::Search(s) => !s.is_empty(),
            Filter::Predicate(_) => true,
        }
    }
}

/// Picks the searchable text fields of an item.
pub type SearchFields<T> = fn(&T) -> Vec<&str>;

/// A derived view over a static collection. Results depend only on the
/// source items and the active filter.
pub struct FilterableList<'a, T> {
    items: &'a [T],
    fields: SearchFields<T>,
    filter: Filter<T>,
}

impl<'a, T: Categorized> FilterableList<'a, T> {
    pub fn new(items: &'a [T], fields: SearchFields<T>) -> Self {
        Self {
            items,
            fields,
            filter: Filter::None,
        }
    }

    pub fn with_filter(mut self, filter: Filter<T>) -> Self {
        self.filter = filter;
        self
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter = Filter::Category(category.into());
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter = Filter::Search(term.into());
    }

    pub fn set_predicate(&mut self, predicate: impl Fn(&T) -> bool + 'static) {
        self.filter = Filter::Predicate(Rc::new(predicate));
    }

    pub fn clear(&mut self) {
        self.filter = Filter::None;
    }

    fn matches(&self, item: &T) -> bool {
        match &self.filter {
            Filter::None => true,
            Filter::Category(category) => {
                category == ALL_CATEGORY || item.category() == category
            }
            Filter::Search(term) => {
                if term.is_empty() {
                    return true;
                }
                let needle = term.to_lowercase();
                (self.fields)(item)
                    .into_iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
            Filter::Predicate(predicate) => predicate(item),
        }
    }

    pub fn results(&self) -> FilteredView<'a, T> {
        let items = self
            .items
            .iter()
            .filter(|item| self.matches(item))
            .collect();
        FilteredView {
            items,
            filtered: self.filter.is_active(),
        }
    }
}

pub struct FilteredView<'a, T> {
    items: Vec<&'a T>,
    filtered: bool,
}

impl<'a, T> FilteredView<'a, T> {
    pub fn items(&self) -> &[&'a T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// False when no filter could have excluded anything, so an empty view
    /// here means the source itself is empty.
    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    /// A filter is applied and nothing matched.
    pub fn no_matches(&self) -> bool {
        self.filtered && self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        title: &'static str,
        body: &'static str,
        category: &'static str,
    }

    impl Categorized for Item {
        fn category(&self) -> &str {
            self.category
        }
    }

    fn fields(item: &Item) -> Vec<&str> {
        vec![item.title, item.body, item.category]
    }

    const ITEMS: &[Item] = &[
        Item { title: "Shop", body: "Online store", category: "E-commerce" },
        Item { title: "Bank App", body: "Secure banking", category: "Mobile" },
        Item { title: "Corporate", body: "Company site", category: "Web" },
        Item { title: "Delivery", body: "Food tracking", category: "Mobile" },
    ];

    fn titles(view: &FilteredView<'_, Item>) -> Vec<&'static str> {
        view.items().iter().map(|item| item.title).collect()
    }

    #[test]
    fn all_category_returns_everything_in_order() {
        let mut list = FilterableList::new(ITEMS, fields);
        list.set_category(ALL_CATEGORY);
        let view = list.results();
        assert_eq!(titles(&view), vec!["Shop", "Bank App", "Corporate", "Delivery"]);
        assert!(!view.is_filtered());
    }

    #[test]
    fn category_is_exact_match() {
        let mut list = FilterableList::new(ITEMS, fields);
        list.set_category("Mobile");
        assert_eq!(titles(&list.results()), vec!["Bank App", "Delivery"]);

        list.set_category("mobile");
        assert!(list.results().no_matches());
    }

    #[test]
    fn empty_search_matches_all() {
        let mut list = FilterableList::new(ITEMS, fields);
        list.set_search_term("");
        let view = list.results();
        assert_eq!(view.len(), ITEMS.len());
        assert!(!view.is_filtered());
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let mut list = FilterableList::new(ITEMS, fields);
        list.set_search_term("SECURE");
        assert_eq!(titles(&list.results()), vec!["Bank App"]);

        list.set_search_term("commerce");
        assert_eq!(titles(&list.results()), vec!["Shop"]);
    }

    #[test]
    fn unmatched_search_is_empty_but_filtered() {
        let mut list = FilterableList::new(ITEMS, fields);
        list.set_search_term("blockchain");
        let view = list.results();
        assert!(view.is_empty());
        assert!(view.is_filtered());
        assert!(view.no_matches());

        list.clear();
        assert_eq!(list.results().len(), ITEMS.len());
    }

    #[test]
    fn predicate_filter() {
        let mut list = FilterableList::new(ITEMS, fields);
        list.set_predicate(|item: &Item| item.title.len() > 5);
        assert_eq!(titles(&list.results()), vec!["Bank App", "Corporate", "Delivery"]);
    }

    #[test]
    fn results_are_repeatable() {
        let list = FilterableList::new(ITEMS, fields).with_filter(Filter::Search("o".into()));
        assert_eq!(titles(&list.results()), titles(&list.results()));
    }

    #[test]
    fn empty_source_is_not_a_no_match() {
        let list = FilterableList::<Item>::new(&[], fields);
        let view = list.results();
        assert!(view.is_empty());
        assert!(!view.no_matches());
    }
}
