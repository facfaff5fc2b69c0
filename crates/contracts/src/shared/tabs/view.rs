/// Minimal view-update surface driven by `TabController`.
///
/// An implementation marks the button/panel pair for `id` as active or
/// inactive: style class plus `aria-selected`, `aria-hidden` and `tabindex`.
pub trait TabView {
    fn set_active(&mut self, id: &str);
    fn set_inactive(&mut self, id: &str);
}
