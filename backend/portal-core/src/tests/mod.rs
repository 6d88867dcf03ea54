mod api_error;
mod dashboard;
mod fixtures;
mod registration;
mod selection;
