//! Application-wide constants

pub const DEFAULT_MENU_NAME: &str = "main";
pub const DEFAULT_LOG_FILE_PREFIX: &str = "menu-server.log";

/// Routes served by the site out of the box, as `(name, path)`.
pub const DEFAULT_ROUTES: &[(&str, &str)] = &[
    ("home", "/"),
    ("about", "/about/"),
    ("contacts", "/contacts/"),
    ("team", "/team/"),
];
