//! Navigation targets
//!
//! Hosts navigate by route name plus a parameter map, so `path?k=v` style
//! URLs are split before being handed to the [`Navigator`](crate::services::Navigator).

use std::collections::BTreeMap;

/// Route of the group management view, opened on the "create new" form.
pub const CREATE_GROUP_URL: &str = "userGroupManagementView?select=group&id=CreateNew";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationTarget {
    pub path: String,
    pub params: BTreeMap<String, String>,
}

impl std::fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)?;
        for (i, (k, v)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{k}={v}")?;
        }
        Ok(())
    }
}

/// Split `path?k=v&k2=v2` into a path and its parameters.
///
/// Parameters without `=` map to an empty value; empty segments are skipped.
pub fn parse_navigation_url(url: &str) -> NavigationTarget {
    let Some((path, query)) = url.split_once('?') else {
        return NavigationTarget {
            path: url.to_string(),
            params: BTreeMap::new(),
        };
    };

    let params = query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (segment.to_string(), String::new()),
        })
        .collect();

    NavigationTarget {
        path: path.to_string(),
        params,
    }
}
