use crate::modules::entries::adapters::outbound::raw_entries_in_memory::InMemoryRawEntries;
use crate::modules::entries::use_cases::list_entries::handler::ListEntriesHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_entries: Arc<ListEntriesHandler<InMemoryRawEntries>>,
}
