use iced::widget::canvas::Canvas;
use iced::widget::{button, column, container, row, text};
use iced::{Element, Fill};

use crate::api::Overview;
use crate::charts::{BarChart, ChartId, ChartRegistry};
use crate::locale;
use crate::message::Message;
use crate::reports::{
    AtrasosDiaSemanaReport, AtrasosPeriodoDiaReport, TendenciaAumentoReport,
    TendenciaReducaoReport, TopAeroportosReport,
};
use crate::theme;

pub fn view<'a>(
    overview: Option<&'a Overview>,
    charts: &'a ChartRegistry,
    refreshing: bool,
    error: Option<&'a str>,
) -> Element<'a, Message> {
    let mut content = column![text("Dashboard de Atrasos de Voos").size(28)].spacing(24);

    if refreshing {
        content = content.push(text("Atualizando dados...").size(14));
    }

    if let Some(message) = error {
        content = content.push(error_banner(message));
    }

    content = content.push(
        row![
            metric_card("Total de Voos", metric_value(overview, |o| locale::thousands(o.total_voos))),
            metric_card(
                "Total de Atrasos (>15 min)",
                metric_value(overview, |o| locale::thousands(o.total_atrasos)),
            ),
            metric_card(
                "Percentual de Atrasos",
                metric_value(overview, |o| locale::percent(o.percentual_atrasos)),
            ),
        ]
        .spacing(16),
    );

    content = content.push(chart_section(
        TopAeroportosReport::title(),
        TopAeroportosReport::subtitle(),
        charts.get(ChartId::TopAeroportos),
        300,
    ));

    content = content.push(
        row![
            chart_section(
                AtrasosDiaSemanaReport::title(),
                AtrasosDiaSemanaReport::subtitle(),
                charts.get(ChartId::AtrasosDiaSemana),
                260,
            ),
            chart_section(
                AtrasosPeriodoDiaReport::title(),
                AtrasosPeriodoDiaReport::subtitle(),
                charts.get(ChartId::AtrasosPeriodoDia),
                260,
            ),
        ]
        .spacing(16),
    );

    content = content.push(
        row![
            chart_section(
                TendenciaAumentoReport::title(),
                TendenciaAumentoReport::subtitle(),
                charts.get(ChartId::TendenciaAumento),
                260,
            ),
            chart_section(
                TendenciaReducaoReport::title(),
                TendenciaReducaoReport::subtitle(),
                charts.get(ChartId::TendenciaReducao),
                260,
            ),
        ]
        .spacing(16),
    );

    container(content).padding(24).into()
}

fn metric_value(overview: Option<&Overview>, format: impl Fn(&Overview) -> String) -> String {
    overview.map(format).unwrap_or_else(|| "--".to_string())
}

fn metric_card<'a>(label: &'static str, value: String) -> Element<'a, Message> {
    container(column![text(label).size(14), text(value).size(26)].spacing(6))
        .padding(16)
        .width(Fill)
        .style(|theme| iced::widget::container::bordered_box(theme))
        .into()
}

fn error_banner(message: &str) -> Element<'_, Message> {
    container(
        row![
            text(format!("Falha ao atualizar os dados: {message}")).size(14),
            button(text("Tentar novamente").size(14))
                .on_press(Message::Retry)
                .style(theme::accent_button_style),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
    )
    .padding(12)
    .width(Fill)
    .style(|theme| iced::widget::container::bordered_box(theme))
    .into()
}

fn chart_section<'a>(
    title: &'static str,
    subtitle: &'static str,
    chart: Option<&'a BarChart>,
    height: u32,
) -> Element<'a, Message> {
    let mut section = column![text(title).size(18), text(subtitle).size(14)].spacing(8);

    match chart {
        Some(chart) => {
            section = section.push(Canvas::new(chart).width(Fill).height(height));
            if chart.series().points.is_empty() {
                section = section.push(text("Sem dados para os anos selecionados.").size(14));
            }
        }
        None => {
            section = section.push(text("Carregando dados...").size(14));
        }
    }

    container(section)
        .padding(16)
        .width(Fill)
        .style(|theme| iced::widget::container::bordered_box(theme))
        .into()
}
