//! Ordered storage for registered template clouds.

use crate::cloud::PointCloud;

/// Templates in registration order.
///
/// Duplicate names are independent entries. There is no removal by name; the
/// registry is only ever cleared as a whole.
#[derive(Clone, Debug, Default)]
pub struct TemplateRegistry {
    clouds: Vec<PointCloud>,
}

impl TemplateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a template and returns how many entries now share its name.
    pub fn push(&mut self, cloud: PointCloud) -> usize {
        self.clouds.push(cloud);
        let name = self.clouds[self.clouds.len() - 1].name();
        self.count_named(name)
    }

    /// Removes every template.
    pub fn clear(&mut self) {
        self.clouds.clear();
    }

    /// Returns the number of registered templates.
    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    /// Returns true if no template is registered.
    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }

    /// Returns the template at `index`.
    pub fn get(&self, index: usize) -> Option<&PointCloud> {
        self.clouds.get(index)
    }

    /// Returns the templates in registration order.
    pub fn as_slice(&self) -> &[PointCloud] {
        &self.clouds
    }

    /// Iterates over the templates in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, PointCloud> {
        self.clouds.iter()
    }

    /// Counts templates registered under `name`.
    pub fn count_named(&self, name: &str) -> usize {
        self.clouds.iter().filter(|c| c.name() == name).count()
    }
}
