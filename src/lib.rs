// Library root
// -----------
// The binary (`main.rs`) is a thin wrapper around these modules.
//
// Module responsibilities:
// - `cli`: flag parsing and the fetch-decode-print run.
// - `api`: the blocking HTTP client for the realm status endpoint.
// - `models`: wire types the JSON body decodes into.
// - `labels`: output vocabularies and faction order.
// - `report`: formats decoded realms as text.
pub mod api;
pub mod cli;
pub mod labels;
pub mod models;
pub mod report;
