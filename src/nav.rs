//! Navigation catalog for the dashboard sidebar.
//!
//! The sidebar is driven by a static, ordered list of entries. Each entry
//! either links to the dashboard root or is an inert placeholder for a
//! section that is not built yet. The list is assembled once at startup,
//! validated, and passed down the component tree as an immutable value;
//! nothing mutates it afterwards.

use crate::error::NavConfigError;

/// Route of the dashboard landing view, the only live destination.
pub const DASHBOARD_ROUTE: &str = "/";

/// Where a navigation entry leads when activated.
///
/// Placeholder rows carry no destination at all, so the renderer never has
/// to compare labels to decide which entry is live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Entry is a link to a fixed internal route.
    Route(&'static str),
    /// Entry is a non-interactive placeholder.
    Disabled,
}

/// One entry in the sidebar navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Display text; unique across the catalog.
    pub label: String,
    /// Optional second line shown under the label.
    pub description: Option<String>,
    /// Link target, or [`NavTarget::Disabled`] for placeholder rows.
    pub target: NavTarget,
}

impl NavItem {
    /// Entry that links to `route`.
    pub fn link(label: impl Into<String>, route: &'static str) -> Self {
        Self {
            label: label.into(),
            description: None,
            target: NavTarget::Route(route),
        }
    }

    /// Inert placeholder entry.
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            target: NavTarget::Disabled,
        }
    }

    /// Attach a description line.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether this entry renders as an activatable link.
    pub fn is_link(&self) -> bool {
        matches!(self.target, NavTarget::Route(_))
    }
}

/// Immutable, validated navigation configuration.
///
/// Display order is insertion order. Validation rejects duplicate labels
/// (rows are keyed by label) and more than one linked entry. An empty
/// catalog is valid and renders an empty navigation region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavCatalog {
    items: Vec<NavItem>,
}

impl NavCatalog {
    /// Validate `items` into a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`NavConfigError::DuplicateLabel`] if two entries share a
    /// label, or [`NavConfigError::MultipleLinks`] if more than one entry
    /// carries a route.
    pub fn new(items: Vec<NavItem>) -> Result<Self, NavConfigError> {
        for (idx, item) in items.iter().enumerate() {
            if items[..idx].iter().any(|prev| prev.label == item.label) {
                return Err(NavConfigError::DuplicateLabel(item.label.clone()));
            }
        }

        let link_count = items.iter().filter(|item| item.is_link()).count();
        if link_count > 1 {
            return Err(NavConfigError::MultipleLinks(link_count));
        }

        Ok(Self { items })
    }

    /// Entries in display order.
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NavCatalog {
    /// The production sidebar: the landing view plus placeholders for every
    /// section the panel will grow into. Valid by construction, with exactly
    /// one linked entry.
    fn default() -> Self {
        Self {
            items: vec![
                NavItem::link("Inicio", DASHBOARD_ROUTE),
                NavItem::placeholder("Exámenes").with_description("Catálogo de exámenes"),
                NavItem::placeholder("Materias").with_description("Subjects por examen"),
                NavItem::placeholder("Temas").with_description("Topics por materia"),
                NavItem::placeholder("Preguntas").with_description("Banco de preguntas"),
                NavItem::placeholder("Intentos").with_description("Attempts y resultados"),
                NavItem::placeholder("Sesiones").with_description("Study sessions"),
                NavItem::placeholder("Progreso").with_description("User progress"),
                NavItem::placeholder("Usuarios").with_description("Gestión de usuarios"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = NavCatalog::default();
        let labels: Vec<&str> = catalog.items().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Inicio",
                "Exámenes",
                "Materias",
                "Temas",
                "Preguntas",
                "Intentos",
                "Sesiones",
                "Progreso",
                "Usuarios",
            ]
        );
    }

    #[test]
    fn test_default_catalog_has_exactly_one_link() {
        let catalog = NavCatalog::default();
        let links: Vec<&NavItem> = catalog.items().iter().filter(|i| i.is_link()).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].label, "Inicio");
        assert_eq!(links[0].target, NavTarget::Route(DASHBOARD_ROUTE));
    }

    #[test]
    fn test_default_catalog_passes_validation() {
        let items = NavCatalog::default().items().to_vec();
        assert!(NavCatalog::new(items).is_ok());
    }

    #[test]
    fn test_default_catalog_is_deterministic() {
        // Rebuilding the catalog yields an identical value, so re-rendering
        // from it produces identical output.
        assert_eq!(NavCatalog::default(), NavCatalog::default());
    }

    #[test]
    fn test_home_entry_has_no_description() {
        let catalog = NavCatalog::default();
        assert_eq!(catalog.items()[0].description, None);
        assert!(catalog.items()[1..].iter().all(|i| i.description.is_some()));
    }

    #[test]
    fn test_link_and_placeholder_scenario() {
        let catalog = NavCatalog::new(vec![
            NavItem::link("Inicio", DASHBOARD_ROUTE),
            NavItem::placeholder("Exámenes").with_description("Catálogo de exámenes"),
        ])
        .unwrap();

        let first = &catalog.items()[0];
        assert_eq!(first.label, "Inicio");
        assert_eq!(first.target, NavTarget::Route("/"));

        let second = &catalog.items()[1];
        assert_eq!(second.label, "Exámenes");
        assert_eq!(second.target, NavTarget::Disabled);
        assert_eq!(second.description.as_deref(), Some("Catálogo de exámenes"));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = NavCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let result = NavCatalog::new(vec![
            NavItem::placeholder("Temas"),
            NavItem::placeholder("Temas"),
        ]);
        assert_eq!(
            result,
            Err(NavConfigError::DuplicateLabel("Temas".to_string()))
        );
    }

    #[test]
    fn test_multiple_links_rejected() {
        let result = NavCatalog::new(vec![
            NavItem::link("Inicio", DASHBOARD_ROUTE),
            NavItem::link("Otro", "/otro"),
        ]);
        assert_eq!(result, Err(NavConfigError::MultipleLinks(2)));
    }
}
