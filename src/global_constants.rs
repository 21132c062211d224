pub const APPLICATION_NAME: &str = "ddg-websearch";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_SEARCH: &str = "[SEARCH]";

pub const USAGE_MESSAGE: &str = "Invalid input!\n  Usage: search.py <keywords>";

pub const QUERY_SEPARATOR: &str = " ";

pub const DEFAULT_SEARCH_ENDPOINT_URL: &str = "https://html.duckduckgo.com/html/";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

pub const DUCKDUCKGO_QUERY_PARAM: &str = "q";
pub const DUCKDUCKGO_REGION_PARAM: &str = "kl";
pub const DUCKDUCKGO_HOST: &str = "duckduckgo.com";
pub const DUCKDUCKGO_REDIRECT_PATH: &str = "/l/";
pub const DUCKDUCKGO_REDIRECT_TARGET_PARAM: &str = "uddg";
pub const DUCKDUCKGO_RELATIVE_LINK_BASE: &str = "https:";

pub const SELECTOR_RESULT_BLOCK: &str = ".result:not(.result--ad)";
pub const SELECTOR_RESULT_LINK: &str = "a.result__a";
pub const SELECTOR_RESULT_SNIPPET: &str = ".result__snippet";
pub const SELECTOR_CHALLENGE_PAGE: &str = ".anomaly-modal, #challenge-form";

pub const SETTINGS_DIRECTORY_NAME: &str = "ddg-websearch";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
