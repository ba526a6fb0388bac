gramps_element! {
    /// A tag record; other records point to it through `tagref`s.
    pub struct Tag {
        attributes {
            req handle: String = "handle",
            req name: String = "name",
            req color: String = "color",
            req priority: String = "priority",
            req change: String = "change",
        }
        children {}
    }
}
