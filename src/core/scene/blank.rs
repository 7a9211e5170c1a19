use super::Layer;

/// Boot layer that does nothing. Used when no factory is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlankLayer;

impl Layer for BlankLayer {
    fn name(&self) -> &str {
        "blank"
    }
}
