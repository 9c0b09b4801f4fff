use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone)]
pub enum FetchError {
    Network(String),
    Status(u16),
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(reason) => write!(f, "request failed: {reason}"),
            FetchError::Status(code) => write!(f, "server answered with status {code}"),
            FetchError::Parse(reason) => write!(f, "invalid JSON response: {reason}"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Overview {
    pub total_voos: i64,
    pub total_atrasos: i64,
    pub percentual_atrasos: f64,
    #[serde(default)]
    pub anos_disponiveis: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AeroportoAtrasos {
    pub aeroporto: String,
    pub atrasos: i64,
}

// The server answers the no-data case with a different key, so the list
// defaults to empty instead of failing the whole cycle.
#[derive(Debug, Clone, Deserialize)]
pub struct TopAeroportos {
    #[serde(default)]
    pub top_aeroportos: Vec<AeroportoAtrasos>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AtrasosPorDiaEPeriodo {
    #[serde(default)]
    pub por_dia_da_semana: HashMap<String, i64>,
    #[serde(default)]
    pub por_periodo_do_dia: HashMap<String, i64>,
}

// Trend maps keep the server's airport ordering; serde_json is built with
// `preserve_order` so the Map iterates in insertion order.
#[derive(Debug, Clone, Deserialize)]
pub struct Tendencias {
    #[serde(default)]
    pub tendencia_aumento: serde_json::Map<String, Value>,
    #[serde(default)]
    pub tendencia_reducao: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone)]
pub struct DashboardData {
    pub overview: Overview,
    pub top_aeroportos: TopAeroportos,
    pub atrasos: AtrasosPorDiaEPeriodo,
    pub tendencias: Tendencias,
}

pub fn year_count(series: &Value, ano: &str) -> i64 {
    series.get(ano).and_then(Value::as_i64).unwrap_or(0)
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    pub async fn fetch_overview(&self, anos: &str) -> Result<Overview, FetchError> {
        self.get_json(endpoint_url(&self.base, "overview", Some(anos)))
            .await
    }

    pub async fn fetch_top_aeroportos(&self, anos: &str) -> Result<TopAeroportos, FetchError> {
        self.get_json(endpoint_url(&self.base, "top_aeroportos", Some(anos)))
            .await
    }

    pub async fn fetch_atrasos_por_dia_e_periodo(
        &self,
        anos: &str,
    ) -> Result<AtrasosPorDiaEPeriodo, FetchError> {
        self.get_json(endpoint_url(
            &self.base,
            "atrasos_por_dia_e_periodo",
            Some(anos),
        ))
        .await
    }

    pub async fn fetch_tendencias(&self) -> Result<Tendencias, FetchError> {
        self.get_json(endpoint_url(&self.base, "tendencias", None))
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        serde_json::from_slice(&body).map_err(|err| FetchError::Parse(err.to_string()))
    }
}

fn endpoint_url(base: &str, path: &str, anos: Option<&str>) -> String {
    match anos {
        Some(anos) => format!("{base}/{path}?anos={anos}"),
        None => format!("{base}/{path}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:5003/api";

    #[test]
    fn filtered_endpoints_carry_the_joined_years() {
        let anos = ["2022", "2023"].join(",");
        assert_eq!(
            endpoint_url(BASE, "overview", Some(&anos)),
            "http://localhost:5003/api/overview?anos=2022,2023"
        );
        assert_eq!(
            endpoint_url(BASE, "top_aeroportos", Some(&anos)),
            "http://localhost:5003/api/top_aeroportos?anos=2022,2023"
        );
    }

    #[test]
    fn empty_selection_keeps_an_empty_anos_parameter() {
        let anos = Vec::<String>::new().join(",");
        assert_eq!(
            endpoint_url(BASE, "atrasos_por_dia_e_periodo", Some(&anos)),
            "http://localhost:5003/api/atrasos_por_dia_e_periodo?anos="
        );
    }

    #[test]
    fn tendencias_has_no_query_string() {
        assert_eq!(
            endpoint_url(BASE, "tendencias", None),
            "http://localhost:5003/api/tendencias"
        );
    }

    #[test]
    fn overview_parses_the_wire_shape() {
        let overview: Overview = serde_json::from_str(
            r#"{
                "total_voos": 1000,
                "total_atrasos": 200,
                "percentual_atrasos": 20.0,
                "anos_disponiveis": [2022, 2023, 2024]
            }"#,
        )
        .unwrap();

        assert_eq!(overview.total_voos, 1000);
        assert_eq!(overview.total_atrasos, 200);
        assert_eq!(overview.percentual_atrasos, 20.0);
        assert_eq!(overview.anos_disponiveis, vec![2022, 2023, 2024]);
    }

    #[test]
    fn empty_top_aeroportos_response_becomes_an_empty_list() {
        let top: TopAeroportos = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(top.top_aeroportos.is_empty());
    }

    #[test]
    fn trend_maps_keep_server_order() {
        let tendencias: Tendencias = serde_json::from_str(
            r#"{
                "tendencia_aumento": {
                    "Santos Dumont": {"2022": 10, "2023": 12, "2024": 30},
                    "Congonhas": {"2022": 5, "2023": 6, "2024": 9}
                },
                "tendencia_reducao": {}
            }"#,
        )
        .unwrap();

        let ordem: Vec<&str> = tendencias
            .tendencia_aumento
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(ordem, vec!["Santos Dumont", "Congonhas"]);
    }

    #[test]
    fn year_count_defaults_missing_years_to_zero() {
        let series: Value = serde_json::from_str(r#"{"2022": 7}"#).unwrap();
        assert_eq!(year_count(&series, "2022"), 7);
        assert_eq!(year_count(&series, "2024"), 0);
    }
}
