use std::time::Duration;

use iced::widget::{button, checkbox, column, container, row, scrollable, text, Space};
use iced::{Alignment, Background, Border, Element, Length, Subscription, Task, Theme};

use crate::api::{ApiClient, DashboardData, Overview};
use crate::charts::{ChartId, ChartRegistry};
use crate::config::Config;
use crate::message::Message;
use crate::reports::{
    AtrasosDiaSemanaReport, AtrasosPeriodoDiaReport, TendenciaAumentoReport,
    TendenciaReducaoReport, TopAeroportosReport,
};
use crate::theme::{
    ACCENT, DRAWER_BG, DRAWER_ITEM_BG, DRAWER_TEXT_ACTIVE, DRAWER_TEXT_INACTIVE,
};
use lucide_icons::iced::{icon_panel_left_close, icon_panel_left_open, icon_plane};

#[derive(Debug, Clone)]
pub struct YearOption {
    pub value: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RefreshPhase {
    Idle,
    Refreshing,
}

pub struct App {
    theme: Theme,
    client: ApiClient,
    sidebar_collapsed: bool,
    years: Vec<YearOption>,
    phase: RefreshPhase,
    generation: u64,
    overview: Option<Overview>,
    charts: ChartRegistry,
    last_error: Option<String>,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let config = Config::from_env();

        let mut app = Self {
            theme: Theme::Light,
            client: ApiClient::new(config.api_base),
            sidebar_collapsed: false,
            years: Vec::new(),
            phase: RefreshPhase::Idle,
            generation: 0,
            overview: None,
            charts: ChartRegistry::default(),
            last_error: None,
        };

        let bootstrap = app.bootstrap();
        (app, bootstrap)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleSidebar => {
                self.sidebar_collapsed = !self.sidebar_collapsed;
                Task::none()
            }
            Message::YearToggled(index, selected) => {
                if let Some(year) = self.years.get_mut(index) {
                    year.selected = selected;
                }
                self.start_refresh()
            }
            Message::Retry => {
                if self.years.is_empty() {
                    self.bootstrap()
                } else {
                    self.start_refresh()
                }
            }
            Message::BootstrapLoaded(Ok(overview)) => {
                self.years = overview
                    .anos_disponiveis
                    .iter()
                    .map(|ano| YearOption {
                        value: ano.to_string(),
                        selected: true,
                    })
                    .collect();
                self.start_refresh()
            }
            Message::BootstrapLoaded(Err(error)) => {
                tracing::warn!(%error, "failed to load the available years");
                self.last_error = Some(error);
                Task::none()
            }
            Message::RefreshLoaded { generation, result } => {
                if generation != self.generation {
                    tracing::debug!(
                        generation,
                        current = self.generation,
                        "stale refresh dropped"
                    );
                    return Task::none();
                }

                self.phase = RefreshPhase::Idle;
                match result {
                    Ok(data) => {
                        self.apply(data);
                        self.last_error = None;
                    }
                    Err(error) => {
                        tracing::warn!(%error, "dashboard refresh failed");
                        self.last_error = Some(error);
                    }
                }
                Task::none()
            }
            Message::AnimationTick => {
                self.charts.tick();
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.charts.is_animating() {
            iced::time::every(Duration::from_millis(16)).map(|_| Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let sidebar = self.sidebar_view();
        let content = scrollable(crate::screens::dashboard::view(
            self.overview.as_ref(),
            &self.charts,
            self.phase == RefreshPhase::Refreshing,
            self.last_error.as_deref(),
        ))
        .width(Length::Fill);

        row![sidebar, content].height(Length::Fill).into()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn bootstrap(&mut self) -> Task<Message> {
        self.last_error = None;
        let client = self.client.clone();

        // An empty filter asks the server for every year it covers.
        Task::perform(
            async move {
                client
                    .fetch_overview("")
                    .await
                    .map_err(|err| err.to_string())
            },
            Message::BootstrapLoaded,
        )
    }

    fn start_refresh(&mut self) -> Task<Message> {
        self.generation += 1;
        self.phase = RefreshPhase::Refreshing;
        self.last_error = None;

        let generation = self.generation;
        let client = self.client.clone();
        let anos = self.anos_param();

        tracing::info!(anos = %anos, generation, "refreshing dashboard");

        Task::perform(
            async move {
                let result = tokio::try_join!(
                    client.fetch_overview(&anos),
                    client.fetch_top_aeroportos(&anos),
                    client.fetch_atrasos_por_dia_e_periodo(&anos),
                    client.fetch_tendencias(),
                );

                result
                    .map(|(overview, top_aeroportos, atrasos, tendencias)| DashboardData {
                        overview,
                        top_aeroportos,
                        atrasos,
                        tendencias,
                    })
                    .map_err(|err| err.to_string())
            },
            move |result| Message::RefreshLoaded { generation, result },
        )
    }

    fn apply(&mut self, data: DashboardData) {
        self.overview = Some(data.overview);
        self.charts.render(
            ChartId::TopAeroportos,
            TopAeroportosReport::series(&data.top_aeroportos),
        );
        self.charts.render(
            ChartId::AtrasosDiaSemana,
            AtrasosDiaSemanaReport::series(&data.atrasos),
        );
        self.charts.render(
            ChartId::AtrasosPeriodoDia,
            AtrasosPeriodoDiaReport::series(&data.atrasos),
        );
        self.charts.render(
            ChartId::TendenciaAumento,
            TendenciaAumentoReport::series(&data.tendencias),
        );
        self.charts.render(
            ChartId::TendenciaReducao,
            TendenciaReducaoReport::series(&data.tendencias),
        );
    }

    fn anos_param(&self) -> String {
        let selected: Vec<&str> = self
            .years
            .iter()
            .filter(|year| year.selected)
            .map(|year| year.value.as_str())
            .collect();

        selected.join(",")
    }

    fn sidebar_view(&self) -> Element<'_, Message> {
        let toggle_icon = if self.sidebar_collapsed {
            icon_panel_left_open()
        } else {
            icon_panel_left_close()
        };

        let toggle = button(toggle_icon.size(18))
            .on_press(Message::ToggleSidebar)
            .style(|_theme, status| {
                let mut background = ACCENT;
                if matches!(status, button::Status::Hovered) {
                    background.a = 0.85;
                }
                if matches!(status, button::Status::Pressed) {
                    background.a = 0.7;
                }

                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: DRAWER_TEXT_ACTIVE,
                    ..Default::default()
                }
            });

        let mut content = column![toggle, Space::new().height(Length::Fixed(12.0))]
            .spacing(12)
            .padding(12)
            .width(if self.sidebar_collapsed {
                Length::Fixed(64.0)
            } else {
                Length::Fixed(220.0)
            })
            .height(Length::Fill);

        if self.sidebar_collapsed {
            content = content.push(
                row![
                    Space::new().width(Length::Fill),
                    icon_plane().size(18).style(|_| iced::widget::text::Style {
                        color: Some(DRAWER_TEXT_INACTIVE),
                    }),
                    Space::new().width(Length::Fill)
                ]
                .align_y(Alignment::Center),
            );
        } else {
            content = content.push(self.filters_view());
        }

        container(content)
            .style(|_| iced::widget::container::background(DRAWER_BG))
            .into()
    }

    fn filters_view(&self) -> Element<'_, Message> {
        let header = row![
            icon_plane().size(18).style(|_| iced::widget::text::Style {
                color: Some(DRAWER_TEXT_ACTIVE),
            }),
            text("Filtros").style(|_| iced::widget::text::Style {
                color: Some(DRAWER_TEXT_ACTIVE),
            })
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let mut filters = column![
            header,
            text("Anos").size(14).style(|_| iced::widget::text::Style {
                color: Some(DRAWER_TEXT_INACTIVE),
            })
        ]
        .spacing(10);

        if self.years.is_empty() {
            filters = filters.push(text("Carregando anos...").size(14).style(|_| {
                iced::widget::text::Style {
                    color: Some(DRAWER_TEXT_INACTIVE),
                }
            }));
        }

        for (index, year) in self.years.iter().enumerate() {
            filters = filters.push(
                checkbox(year.selected)
                    .label(year.value.clone())
                    .on_toggle(move |checked| Message::YearToggled(index, checked))
                    .style(|_theme, status| {
                        let mut background = DRAWER_ITEM_BG;
                        if matches!(status, checkbox::Status::Hovered { .. }) {
                            background = ACCENT;
                        }

                        checkbox::Style {
                            background: Background::Color(background),
                            icon_color: DRAWER_TEXT_ACTIVE,
                            border: Border {
                                color: ACCENT,
                                width: 1.0,
                                radius: 2.0.into(),
                            },
                            text_color: Some(DRAWER_TEXT_ACTIVE),
                        }
                    }),
            );
        }

        filters.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AeroportoAtrasos, AtrasosPorDiaEPeriodo, TopAeroportos};
    use std::collections::HashMap;

    fn app() -> App {
        let (app, _task) = App::new();
        app
    }

    fn overview(anos: Vec<i64>) -> Overview {
        Overview {
            total_voos: 1000,
            total_atrasos: 200,
            percentual_atrasos: 20.0,
            anos_disponiveis: anos,
        }
    }

    fn dashboard_data() -> DashboardData {
        DashboardData {
            overview: overview(vec![2022, 2023, 2024]),
            top_aeroportos: TopAeroportos {
                top_aeroportos: vec![AeroportoAtrasos {
                    aeroporto: "Guarulhos (SP)".to_string(),
                    atrasos: 120,
                }],
            },
            atrasos: AtrasosPorDiaEPeriodo {
                por_dia_da_semana: HashMap::from([("Monday".to_string(), 10)]),
                por_periodo_do_dia: HashMap::from([("Tarde".to_string(), 40)]),
            },
            tendencias: serde_json::from_str(
                r#"{
                    "tendencia_aumento": {"Congonhas": {"2022": 5, "2024": 9}},
                    "tendencia_reducao": {"Galeão": {"2022": 50, "2024": 18}}
                }"#,
            )
            .unwrap(),
        }
    }

    fn all_charts() -> [ChartId; 5] {
        [
            ChartId::TopAeroportos,
            ChartId::AtrasosDiaSemana,
            ChartId::AtrasosPeriodoDia,
            ChartId::TendenciaAumento,
            ChartId::TendenciaReducao,
        ]
    }

    #[test]
    fn bootstrap_selects_every_available_year() {
        let mut app = app();
        let _ = app.update(Message::BootstrapLoaded(Ok(overview(vec![
            2022, 2023, 2024,
        ]))));

        let years: Vec<(&str, bool)> = app
            .years
            .iter()
            .map(|year| (year.value.as_str(), year.selected))
            .collect();
        assert_eq!(
            years,
            vec![("2022", true), ("2023", true), ("2024", true)]
        );
        assert_eq!(app.phase, RefreshPhase::Refreshing);
        assert_eq!(app.anos_param(), "2022,2023,2024");
    }

    #[test]
    fn toggling_a_year_narrows_the_filter_and_restarts_the_refresh() {
        let mut app = app();
        let _ = app.update(Message::BootstrapLoaded(Ok(overview(vec![
            2022, 2023, 2024,
        ]))));
        let before = app.generation;

        let _ = app.update(Message::YearToggled(1, false));

        assert!(!app.years[1].selected);
        assert_eq!(app.generation, before + 1);
        assert_eq!(app.anos_param(), "2022,2024");
    }

    #[test]
    fn deselecting_everything_sends_an_empty_filter() {
        let mut app = app();
        let _ = app.update(Message::BootstrapLoaded(Ok(overview(vec![2022]))));
        let _ = app.update(Message::YearToggled(0, false));

        assert_eq!(app.anos_param(), "");
    }

    #[test]
    fn a_matching_refresh_fills_metrics_and_charts() {
        let mut app = app();
        let _ = app.update(Message::BootstrapLoaded(Ok(overview(vec![2022]))));

        let _ = app.update(Message::RefreshLoaded {
            generation: app.generation,
            result: Ok(dashboard_data()),
        });

        assert_eq!(app.phase, RefreshPhase::Idle);
        assert!(app.last_error.is_none());
        assert_eq!(app.overview.as_ref().unwrap().total_voos, 1000);
        for id in all_charts() {
            assert!(app.charts.get(id).is_some());
        }
    }

    #[test]
    fn stale_refreshes_are_dropped() {
        let mut app = app();
        let _ = app.update(Message::BootstrapLoaded(Ok(overview(vec![2022, 2023]))));
        let stale = app.generation;
        let _ = app.update(Message::YearToggled(0, false));

        let _ = app.update(Message::RefreshLoaded {
            generation: stale,
            result: Ok(dashboard_data()),
        });

        assert_eq!(app.phase, RefreshPhase::Refreshing);
        assert!(app.overview.is_none());
        for id in all_charts() {
            assert!(app.charts.get(id).is_none());
        }
    }

    #[test]
    fn a_failed_refresh_keeps_the_previous_data_on_screen() {
        let mut app = app();
        let _ = app.update(Message::BootstrapLoaded(Ok(overview(vec![2022]))));
        let _ = app.update(Message::RefreshLoaded {
            generation: app.generation,
            result: Ok(dashboard_data()),
        });

        let _ = app.update(Message::YearToggled(0, false));
        let _ = app.update(Message::RefreshLoaded {
            generation: app.generation,
            result: Err("request failed: connection refused".to_string()),
        });

        assert_eq!(app.phase, RefreshPhase::Idle);
        assert!(app.last_error.is_some());
        assert_eq!(app.overview.as_ref().unwrap().total_voos, 1000);
        for id in all_charts() {
            assert!(app.charts.get(id).is_some());
        }
    }

    #[test]
    fn retry_after_a_failed_bootstrap_clears_the_error() {
        let mut app = app();
        let _ = app.update(Message::BootstrapLoaded(Err("offline".to_string())));
        assert!(app.last_error.is_some());

        let _ = app.update(Message::Retry);
        assert!(app.last_error.is_none());
        assert!(app.years.is_empty());
    }
}
