pub mod atrasos_dia_semana;
pub mod atrasos_periodo_dia;
pub mod tendencia_aumento;
pub mod tendencia_reducao;
pub mod top_aeroportos;

pub use atrasos_dia_semana::AtrasosDiaSemanaReport;
pub use atrasos_periodo_dia::AtrasosPeriodoDiaReport;
pub use tendencia_aumento::TendenciaAumentoReport;
pub use tendencia_reducao::TendenciaReducaoReport;
pub use top_aeroportos::TopAeroportosReport;

// The trend endpoint reports per-year counts; the charts compare the last
// covered year against the first.
pub(crate) const ANO_INICIAL: &str = "2022";
pub(crate) const ANO_FINAL: &str = "2024";
