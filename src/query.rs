/// The four recognized orderings of a hub listing. Anything else in the
/// `sort` parameter means "leave the filtered order alone".
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Category,
    ReadTime,
    Recent,
}

impl SortKey {
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "title" => Some(Self::Title),
            "category" => Some(Self::Category),
            "readtime" => Some(Self::ReadTime),
            "recent" => Some(Self::Recent),
            _ => None,
        }
    }
}

/// A normalized hub query. Absent parameters come through as empty strings,
/// which every downstream stage reads as "no filter".
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HubQuery {
    pub search: String,
    pub category: String,
    pub tag: String,
    pub sort: Option<SortKey>,
}

impl HubQuery {
    /// Normalizes raw query pairs as they come off the wire. Web query
    /// strings may repeat a key; the first occurrence wins. This never
    /// fails: unrecognized values degrade to "no filter"/"no sort".
    #[must_use]
    pub fn from_params(params: &[(String, String)]) -> Self {
        let first = |key: &str| {
            params
                .iter()
                .find(|(k, _)| k == key)
                .map_or("", |(_, v)| v.as_str())
        };
        HubQuery {
            search: first("q").trim().to_lowercase(),
            category: first("category").to_owned(),
            tag: first("tag").to_owned(),
            sort: SortKey::from_param(first("sort")),
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{HubQuery, SortKey};

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn absent_parameters_become_empty() {
        let query = HubQuery::from_params(&[]);
        assert_eq!(HubQuery::default(), query);
    }

    #[test]
    fn repeated_keys_keep_the_first_value() {
        let query = HubQuery::from_params(&pairs(&[
            ("category", "housing"),
            ("category", "banking"),
            ("tag", "london"),
        ]));
        assert_eq!("housing", query.category);
        assert_eq!("london", query.tag);
    }

    #[test]
    fn search_text_is_trimmed_and_lowercased() {
        let query = HubQuery::from_params(&pairs(&[("q", "  Moka POT ")]));
        assert_eq!("moka pot", query.search);
    }

    #[test]
    fn unknown_sort_means_no_sort() {
        assert_eq!(None, SortKey::from_param("alphabetical"));
        assert_eq!(None, SortKey::from_param(""));
        assert_eq!(Some(SortKey::Recent), SortKey::from_param("recent"));

        let query = HubQuery::from_params(&pairs(&[("sort", "alphabetical")]));
        assert_eq!(None, query.sort);
    }
}
