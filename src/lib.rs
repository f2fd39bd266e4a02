pub mod modules {
    pub mod entries {
        pub mod core {
            pub mod created_at;
            pub mod emotion;
            pub mod entry;
            pub mod errors;
            pub mod raw;
        }
        pub mod use_cases {
            pub mod list_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod source_port;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod raw_json;
            }
            pub mod mappers {
                pub mod raw_emotion_to_emotion;
                pub mod raw_entry_to_entry;
            }
            pub mod outbound {
                pub mod raw_entries_in_memory;
            }
        }
    }
}

pub mod shell;
