use super::{DateValue, HandleRef, ObjRef, SrcAttribute};

gramps_element! {
    /// A citation of a page or entry within a source.
    pub struct Citation {
        attributes {
            opt id: Option<String> = "id",
            req handle: String = "handle",
            opt private: Option<bool> = "priv",
            req change: String = "change",
        }
        children {
            choice date: Option<DateValue>,
            opt page: Option<String> = "page",
            one confidence: String = "confidence",
            many noterefs: Vec<HandleRef> = "noteref",
            many objrefs: Vec<ObjRef> = "objref",
            many srcattributes: Vec<SrcAttribute> = "srcattribute",
            opt sourceref: Option<HandleRef> = "sourceref",
            many tagrefs: Vec<HandleRef> = "tagref",
        }
    }
}
