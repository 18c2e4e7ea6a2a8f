use std::sync::Arc;

use crate::modules::analytics::use_cases::summarize::handler::SummarizeHandler;
use crate::modules::timer::use_cases::get_active_timer::handler::GetActiveTimerHandler;
use crate::modules::timer::use_cases::pause_timer::handler::PauseTimerHandler;
use crate::modules::timer::use_cases::resume_timer::handler::ResumeTimerHandler;
use crate::modules::timer::use_cases::start_timer::handler::StartTimerHandler;
use crate::modules::timer::use_cases::stop_timer::handler::StopTimerHandler;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::project_store::ProjectStore;
use crate::shared::infrastructure::project_store::in_memory::InMemoryProjectStore;
use crate::shared::infrastructure::session_store::SessionStore;
use crate::shared::infrastructure::session_store::in_memory::InMemorySessionStore;
use crate::shared::infrastructure::time_log_store::TimeLogStore;
use crate::shared::infrastructure::time_log_store::in_memory::InMemoryTimeLogStore;
use crate::shared::infrastructure::timer_store::in_memory::InMemoryTimerStore;

#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub sessions: Arc<dyn SessionStore>,
    pub projects: Arc<dyn ProjectStore>,
    pub time_logs: Arc<dyn TimeLogStore>,
    pub start_timer: Arc<StartTimerHandler>,
    pub pause_timer: Arc<PauseTimerHandler>,
    pub resume_timer: Arc<ResumeTimerHandler>,
    pub stop_timer: Arc<StopTimerHandler>,
    pub get_active_timer: Arc<GetActiveTimerHandler>,
    pub summarize: Arc<SummarizeHandler>,
}

/// Fully in-memory composition, with the concrete adapters exposed so
/// callers (main, tests) can seed sessions and data or toggle stores
/// offline.
pub struct InMemoryApp {
    pub state: AppState,
    pub sessions: Arc<InMemorySessionStore>,
    pub timers: Arc<InMemoryTimerStore>,
    pub time_logs: Arc<InMemoryTimeLogStore>,
    pub projects: Arc<InMemoryProjectStore>,
}

impl AppState {
    pub fn in_memory(clock: Arc<dyn Clock>) -> InMemoryApp {
        let sessions = Arc::new(InMemorySessionStore::new());
        let timers = Arc::new(InMemoryTimerStore::new());
        let time_logs = Arc::new(InMemoryTimeLogStore::new());
        let projects = Arc::new(InMemoryProjectStore::new());

        let state = AppState {
            clock: clock.clone(),
            sessions: sessions.clone(),
            projects: projects.clone(),
            time_logs: time_logs.clone(),
            start_timer: Arc::new(StartTimerHandler::new(timers.clone(), clock.clone())),
            pause_timer: Arc::new(PauseTimerHandler::new(timers.clone(), clock.clone())),
            resume_timer: Arc::new(ResumeTimerHandler::new(timers.clone(), clock.clone())),
            stop_timer: Arc::new(StopTimerHandler::new(
                timers.clone(),
                time_logs.clone(),
                clock.clone(),
            )),
            get_active_timer: Arc::new(GetActiveTimerHandler::new(
                timers.clone(),
                projects.clone(),
                clock.clone(),
            )),
            summarize: Arc::new(SummarizeHandler::new(time_logs.clone(), projects.clone())),
        };

        InMemoryApp {
            state,
            sessions,
            timers,
            time_logs,
            projects,
        }
    }
}
