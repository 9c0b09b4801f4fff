use crate::api::AtrasosPorDiaEPeriodo;
use crate::charts::{BarPoint, BarSeries, Orientation};

// The server keys weekdays in English; the axis shows them in Portuguese,
// always all seven and always Monday first.
const DIAS: [(&str, &str); 7] = [
    ("Monday", "Segunda"),
    ("Tuesday", "Terça"),
    ("Wednesday", "Quarta"),
    ("Thursday", "Quinta"),
    ("Friday", "Sexta"),
    ("Saturday", "Sábado"),
    ("Sunday", "Domingo"),
];

pub struct AtrasosDiaSemanaReport;

impl AtrasosDiaSemanaReport {
    pub fn title() -> &'static str {
        "Total de Atrasos por Dia da Semana"
    }

    pub fn subtitle() -> &'static str {
        "Soma de atrasos em cada dia"
    }

    pub fn series(payload: &AtrasosPorDiaEPeriodo) -> BarSeries {
        let points = DIAS
            .iter()
            .map(|(chave, rotulo)| {
                let total = payload
                    .por_dia_da_semana
                    .get(*chave)
                    .copied()
                    .unwrap_or(0);
                BarPoint::new(*rotulo, total)
            })
            .collect();

        BarSeries::new("Total de Atrasos", points, Orientation::Vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_weekday_shows_even_when_the_server_skips_some() {
        let payload: AtrasosPorDiaEPeriodo = serde_json::from_str(
            r#"{
                "por_dia_da_semana": {"Monday": 10, "Friday": 25},
                "por_periodo_do_dia": {}
            }"#,
        )
        .unwrap();

        let series = AtrasosDiaSemanaReport::series(&payload);

        assert_eq!(series.orientation, Orientation::Vertical);
        let labels: Vec<&str> = series.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado", "Domingo"
            ]
        );

        let values: Vec<i64> = series.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![10, 0, 0, 0, 25, 0, 0]);
    }
}
