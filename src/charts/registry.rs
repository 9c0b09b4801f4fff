use std::collections::HashMap;

use iced::Color;

use super::bar::BarChart;
use super::model::BarSeries;
use crate::theme::{CHART_HIGHLIGHT, CHART_PRIMARY, CHART_SECONDARY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    TopAeroportos,
    AtrasosDiaSemana,
    AtrasosPeriodoDia,
    TendenciaAumento,
    TendenciaReducao,
}

impl ChartId {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartId::TopAeroportos => "topAeroportosChart",
            ChartId::AtrasosDiaSemana => "atrasosDiaSemanaChart",
            ChartId::AtrasosPeriodoDia => "atrasosPeriodoDiaChart",
            ChartId::TendenciaAumento => "tendenciaAumentoChart",
            ChartId::TendenciaReducao => "tendenciaReducaoChart",
        }
    }
}

#[derive(Default)]
pub struct ChartRegistry {
    slots: HashMap<ChartId, BarChart>,
}

impl ChartRegistry {
    // Reuses the existing chart so a refresh animates the new values in
    // place instead of rebuilding the widget.
    pub fn render(&mut self, id: ChartId, series: BarSeries) {
        let colors = bar_colors(id, &series);
        tracing::debug!(chart = id.as_str(), bars = series.points.len(), "chart updated");

        match self.slots.get_mut(&id) {
            Some(chart) => chart.set_data(series, colors),
            None => {
                self.slots.insert(id, BarChart::new(series, colors));
            }
        }
    }

    pub fn get(&self, id: ChartId) -> Option<&BarChart> {
        self.slots.get(&id)
    }

    pub fn is_animating(&self) -> bool {
        self.slots.values().any(BarChart::is_animating)
    }

    pub fn tick(&self) {
        for chart in self.slots.values() {
            chart.invalidate();
        }
    }
}

fn bar_colors(id: ChartId, series: &BarSeries) -> Vec<Color> {
    match id {
        ChartId::TopAeroportos => {
            let max = series.points.iter().map(|point| point.value).max();
            let first_max =
                max.and_then(|max| series.points.iter().position(|point| point.value == max));

            series
                .points
                .iter()
                .enumerate()
                .map(|(index, _)| {
                    if Some(index) == first_max {
                        CHART_PRIMARY
                    } else {
                        CHART_SECONDARY
                    }
                })
                .collect()
        }
        ChartId::TendenciaAumento => vec![CHART_HIGHLIGHT; series.points.len()],
        ChartId::AtrasosDiaSemana | ChartId::AtrasosPeriodoDia | ChartId::TendenciaReducao => {
            vec![CHART_SECONDARY; series.points.len()]
        }
    }
}
