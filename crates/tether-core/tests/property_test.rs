#[path = "property/config_properties.rs"]
mod config_properties;
