macro_rules! v1_path {
    ($path:literal) => {
        concat!("/api/v1", $path)
    };
}

/// Versioned API route definitions consumed by the admin client
pub mod v1 {
    pub const VERSION: &str = "v1";

    pub mod profile {
        pub const CURRENT: &str = v1_path!("/company/profile");
        pub const ITEM: &str = v1_path!("/company/profile/{id}");
        pub const LOGO: &str = v1_path!("/company/profile/{id}/logo");
    }

    pub mod social_links {
        pub const COLLECTION: &str = v1_path!("/social-links");
        pub const ITEM: &str = v1_path!("/social-links/{id}");
    }
}

/// Helper utilities for working with route templates
pub mod utils {
    /// Replace a single path parameter.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, value.as_ref())
    }
}
