/// Texto de búsqueda + categoría seleccionada
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    category: Option<String>,
}

impl FilterState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Devuelve `true` si cambió
    pub fn set_query(&mut self, query: &str) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query.to_string();
        true
    }

    /// Un valor vacío (la opción "todas") equivale a sin categoría
    pub fn set_category(&mut self, category: Option<&str>) -> bool {
        let category = category.filter(|c| !c.is_empty()).map(str::to_string);
        if self.category == category {
            return false;
        }
        self.category = category;
        true
    }
}
