// handlers/mod.rs - one module per resource
//
// Every handler takes the shared `AppState`, runs one or two repository calls
// and returns an `ApiResult`, so database failures always produce a response.

pub mod cities;
pub mod states;
pub mod system;
pub mod temperatures;
