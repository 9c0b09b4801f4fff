use crate::api::TopAeroportos;
use crate::charts::{BarPoint, BarSeries, Orientation};

pub struct TopAeroportosReport;

impl TopAeroportosReport {
    pub fn title() -> &'static str {
        "Top 10 Aeroportos com Mais Atrasos"
    }

    pub fn subtitle() -> &'static str {
        "Total de atrasos por aeroporto"
    }

    pub fn series(payload: &TopAeroportos) -> BarSeries {
        let points = payload
            .top_aeroportos
            .iter()
            .map(|aeroporto| BarPoint::new(aeroporto.aeroporto.clone(), aeroporto.atrasos))
            .collect();

        BarSeries::new("Atrasos", points, Orientation::Horizontal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_follow_the_server_ranking() {
        let payload: TopAeroportos = serde_json::from_str(
            r#"{
                "top_aeroportos": [
                    {"aeroporto": "Guarulhos (SP)", "atrasos": 120},
                    {"aeroporto": "Congonhas (SP)", "atrasos": 80},
                    {"aeroporto": "Santos Dumont (RJ)", "atrasos": 75}
                ]
            }"#,
        )
        .unwrap();

        let series = TopAeroportosReport::series(&payload);

        assert_eq!(series.name, "Atrasos");
        assert_eq!(series.orientation, Orientation::Horizontal);
        let labels: Vec<&str> = series.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Guarulhos (SP)", "Congonhas (SP)", "Santos Dumont (RJ)"]
        );
        assert_eq!(series.points[0].value, 120);
    }

    #[test]
    fn no_airports_means_no_bars() {
        let payload: TopAeroportos = serde_json::from_str(r#"{"data": []}"#).unwrap();
        let series = TopAeroportosReport::series(&payload);
        assert!(series.points.is_empty());
    }
}
