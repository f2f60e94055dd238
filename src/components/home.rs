use dioxus::prelude::*;

/// Card describing a section of the panel that is not built yet
#[component]
fn PlaceholderCard(title: &'static str, body: &'static str) -> Element {
    rsx! {
        div { class: "tp-card",
            h2 { class: "tp-card-title", "{title}" }
            p { class: "tp-card-text", "{body}" }
        }
    }
}

/// Landing view for the dashboard root.
///
/// Everything here is presentational: an intro plus placeholder cards for
/// the catalog, question bank, attempts, and sessions/progress sections.
#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "tp-home",
            section { class: "tp-home-intro",
                h1 { class: "tp-page-title", "Inicio" }
                p { class: "tp-page-subtitle",
                    "Base para construir el panel: catálogo (exámenes/materias/temas), "
                    "banco de preguntas, intentos, sesiones y progreso."
                }
            }

            section { class: "tp-card-grid",
                PlaceholderCard {
                    title: "Catálogo",
                    body: "Exámenes → Materias → Temas.",
                }
                PlaceholderCard {
                    title: "Preguntas",
                    body: "Banco de preguntas, alternativas y explicación.",
                }
                PlaceholderCard {
                    title: "Intentos",
                    body: "Seguimiento de intentos, estado y resultados.",
                }
                PlaceholderCard {
                    title: "Sesiones y progreso",
                    body: "Sesiones de estudio y métricas por tema.",
                }
            }
        }
    }
}
