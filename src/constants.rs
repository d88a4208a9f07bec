//! Constants used throughout the setup tool

/// Key pattern a package selection must satisfy
pub const PACKAGE_KEY_PATTERN: &str = "^[0-9]$";

/// Printed whenever a selection key matches nothing in the catalog
pub const UNKNOWN_KEY_MESSAGE: &str = "The key you've entered doesn't exists";

/// Printed when the user leaves the setup before it finished
pub const EXITED_NOTICE: &str = "🚧  Exited without doing anything";

/// Printed when an own repository was requested without a url
pub const MISSING_URL_MESSAGE: &str = "Please enter the url of your repository";

/// Pattern accepted by yes/no questions
pub const YES_NO_PATTERN: &str = "^(?i)(y|yes|n|no)$";

/// Pattern a machine name must satisfy
pub const MACHINE_NAME_PATTERN: &str = "^[a-z0-9]+(?:[-_][a-z0-9]+)*$";

/// Files rewritten with the project's names
pub mod substitution {
    pub const TITLE_TOKEN: &str = "%project_title%";
    pub const TITLE_FILE: &str = "public/index-full.html";
    pub const MACHINE_TOKEN: &str = "project_title";
    pub const MACHINE_FILE: &str = "package.json";
}

/// Shell commands issued during setup
pub mod commands {
    pub const REMOVE_GIT: &str = "rm -rf .git";
    pub const INSTALL: &str = "yarn install";
    pub const REMOVE_SETUP: &str = "rm -rf ./config/setup";
    pub const TEMP_GIT_DIR: &str = ".gitTemp";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
