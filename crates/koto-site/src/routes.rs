//! The navigation surface: eight logical destinations.

use std::fmt;

/// A navigable destination on the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The public job listing.
    Home,
    /// Job detail, by posting id.
    JobDetail(String),
    /// Application form, by posting id.
    Apply(String),
    /// "Post a job" information page.
    PostJobInfo,
    /// Admin login portal.
    AdminLogin,
    /// Admin dashboard (post-login).
    AdminDashboard,
    /// Static legal pages.
    Terms,
    Privacy,
}

impl Route {
    /// The canonical path for this destination.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::JobDetail(id) => format!("/job/{id}"),
            Self::Apply(id) => format!("/apply/{id}"),
            Self::PostJobInfo => "/post-job".to_string(),
            Self::AdminLogin => "/admin".to_string(),
            Self::AdminDashboard => "/admin/dashboard".to_string(),
            Self::Terms => "/terms".to_string(),
            Self::Privacy => "/privacy".to_string(),
        }
    }

    /// Parse a path back into a destination. Unknown paths yield `None`.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Home),
            "/post-job" => Some(Self::PostJobInfo),
            "/admin" => Some(Self::AdminLogin),
            "/admin/dashboard" => Some(Self::AdminDashboard),
            "/terms" => Some(Self::Terms),
            "/privacy" => Some(Self::Privacy),
            _ => {
                if let Some(id) = path.strip_prefix("/job/") {
                    (!id.is_empty() && !id.contains('/')).then(|| Self::JobDetail(id.to_string()))
                } else if let Some(id) = path.strip_prefix("/apply/") {
                    (!id.is_empty() && !id.contains('/')).then(|| Self::Apply(id.to_string()))
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Route::Home, "/")]
    #[case(Route::JobDetail("job-abc123xyz".into()), "/job/job-abc123xyz")]
    #[case(Route::Apply("job-abc123xyz".into()), "/apply/job-abc123xyz")]
    #[case(Route::PostJobInfo, "/post-job")]
    #[case(Route::AdminLogin, "/admin")]
    #[case(Route::AdminDashboard, "/admin/dashboard")]
    #[case(Route::Terms, "/terms")]
    #[case(Route::Privacy, "/privacy")]
    fn path_and_parse_roundtrip(#[case] route: Route, #[case] path: &str) {
        assert_eq!(route.path(), path);
        assert_eq!(Route::parse(path), Some(route));
    }

    #[rstest]
    #[case("/job/")]
    #[case("/job/a/b")]
    #[case("/unknown")]
    #[case("")]
    fn bad_paths_do_not_parse(#[case] path: &str) {
        assert_eq!(Route::parse(path), None);
    }
}
