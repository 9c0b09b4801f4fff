#[derive(Debug, Clone)]
pub enum Message {
    ToggleSidebar,
    YearToggled(usize, bool),
    Retry,
    BootstrapLoaded(Result<crate::api::Overview, String>),
    RefreshLoaded {
        generation: u64,
        result: Result<crate::api::DashboardData, String>,
    },
    AnimationTick,
}
