//! URL paths of the top-level views.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Feed,
    Login,
    Register,
    Profile(String),
    Chat,
    Analytics,
    Notifications,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Feed => "/".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Profile(id) => format!("/profile/{id}"),
            Self::Chat => "/chat".to_owned(),
            Self::Analytics => "/analytics".to_owned(),
            Self::Notifications => "/notifications".to_owned(),
        }
    }

    /// Match a location path (query and fragment ignored). `None` means the
    /// router shows its fallback.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
        match segments.as_slice() {
            [] => Some(Self::Feed),
            ["login"] => Some(Self::Login),
            ["register"] => Some(Self::Register),
            ["profile", id] if !id.is_empty() => Some(Self::Profile((*id).to_owned())),
            ["chat"] => Some(Self::Chat),
            ["analytics"] => Some(Self::Analytics),
            ["notifications"] => Some(Self::Notifications),
            _ => None,
        }
    }
}
