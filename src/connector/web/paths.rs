use crate::domain::QueryMode;

pub const INDEX: &str = "/";
pub const ABOUT: &str = "/about";
pub const TEAM: &str = "/team";
pub const FORM: &str = "/form";
pub const GPT_DEMO: &str = "/gptdemo";
pub const FORMULA: &str = "/formula";
pub const GET_PRIME: &str = "/Get_Prime";

/// The interactive route that serves (and receives) the form for `mode`.
pub fn form_path(mode: QueryMode) -> &'static str {
    match mode {
        QueryMode::Generic => GPT_DEMO,
        QueryMode::Formula => FORMULA,
        QueryMode::Prime => GET_PRIME,
    }
}
