use super::{Attribute, DateValue, HandleRef, ObjRef};

gramps_element! {
    /// An event record such as a birth or a census.
    pub struct Event {
        attributes {
            opt id: Option<String> = "id",
            req handle: String = "handle",
            opt private: Option<bool> = "priv",
            req change: String = "change",
        }
        children {
            opt r#type: Option<String> = "type",
            choice date: Option<DateValue>,
            opt place: Option<HandleRef> = "place",
            opt cause: Option<String> = "cause",
            opt description: Option<String> = "description",
            many attributes: Vec<Attribute> = "attribute",
            many noterefs: Vec<HandleRef> = "noteref",
            many citationrefs: Vec<HandleRef> = "citationref",
            many objrefs: Vec<ObjRef> = "objref",
            many tagrefs: Vec<HandleRef> = "tagref",
        }
    }
}
