pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod project_store;
        pub mod session_store;
        pub mod time_log_store;
        pub mod timer_store;
    }
}

pub mod modules {
    pub mod timer {
        pub mod core {
            pub mod duration;
            pub mod timer;
        }
        pub mod use_cases {
            pub mod timer_view;
            pub mod start_timer {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod pause_timer {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod resume_timer {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod stop_timer {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_active_timer {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod analytics {
        pub mod core {
            pub mod summary;
        }
        pub mod use_cases {
            pub mod summarize {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod time_logs {
        pub mod core {
            pub mod time_log;
        }
        pub mod use_cases {
            pub mod delete_time_log {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_time_logs {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod projects {
        pub mod core {
            pub mod project;
        }
        pub mod use_cases {
            pub mod create_project {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_project {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_projects {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_project {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
