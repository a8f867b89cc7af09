// ============================================================================
// PAGE CHROME - Todo lo de la página que no es mapa ni lista
// ============================================================================
// Métodos con &self: la implementación web trabaja sobre el DOM y los fakes
// usan mutabilidad interior.
// ============================================================================

pub trait PageChrome {
    /// ¿Viewport pequeño (media query móvil)?
    fn is_small_viewport(&self) -> bool;

    fn scroll_map_into_view(&self);

    fn is_list_modal_open(&self) -> bool;

    fn open_list_modal(&self);

    fn close_list_modal(&self);

    /// Deshabilitar/rehabilitar el botón "現在地" con su etiqueta
    fn set_locate_busy(&self, busy: bool, label: &str);

    /// Aviso bloqueante al usuario (alert)
    fn notify(&self, message: &str);
}

/// Mientras vive, el botón de ubicación está deshabilitado con la etiqueta de "cargando".
/// Al soltarse lo rehabilita siempre, pase lo que pase.
pub struct BusyGuard<'a, P: PageChrome + ?Sized> {
    page: &'a P,
    idle_label: String,
}

impl<'a, P: PageChrome + ?Sized> BusyGuard<'a, P> {
    pub fn engage(page: &'a P, busy_label: &str, idle_label: &str) -> Self {
        page.set_locate_busy(true, busy_label);
        Self {
            page,
            idle_label: idle_label.to_string(),
        }
    }
}

impl<P: PageChrome + ?Sized> Drop for BusyGuard<'_, P> {
    fn drop(&mut self) {
        self.page.set_locate_busy(false, &self.idle_label);
    }
}
