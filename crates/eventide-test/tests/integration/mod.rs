mod helpers;

mod cascade;
mod occurrence_queries;
mod opening_closing;
mod snapshot_report;
mod times_description;
