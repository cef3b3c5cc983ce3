//! Entity implementation

slotmap::new_key_type! {
    /// Entity identifier
    ///
    /// A generational key: once an entity is despawned its handle never
    /// resolves again, even if the slot is reused.
    pub struct Entity;
}

impl Entity {
    /// Stable numeric id for logging and ordering
    pub fn id(self) -> u64 {
        slotmap::Key::data(&self).as_ffi()
    }
}
