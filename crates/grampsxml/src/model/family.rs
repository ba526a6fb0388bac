use super::{Attribute, EventRef, HandleRef, LdsOrd, ObjRef};

gramps_element! {
    /// A family record linking parents and children.
    pub struct Family {
        attributes {
            opt id: Option<String> = "id",
            req handle: String = "handle",
            opt private: Option<bool> = "priv",
            req change: String = "change",
        }
        children {
            opt rel: Option<Rel> = "rel",
            opt father: Option<HandleRef> = "father",
            opt mother: Option<HandleRef> = "mother",
            many eventrefs: Vec<EventRef> = "eventref",
            many lds_ords: Vec<LdsOrd> = "lds_ord",
            many objrefs: Vec<ObjRef> = "objref",
            many childrefs: Vec<ChildRef> = "childref",
            many attributes: Vec<Attribute> = "attribute",
            many noterefs: Vec<HandleRef> = "noteref",
            many citationrefs: Vec<HandleRef> = "citationref",
            many tagrefs: Vec<HandleRef> = "tagref",
        }
    }
}

gramps_element! {
    /// Relationship type of the couple, e.g. `Married`.
    pub struct Rel {
        attributes {
            req r#type: String = "type",
        }
        children {}
    }
}

gramps_element! {
    /// A child of the family with the relation to each parent.
    pub struct ChildRef {
        attributes {
            req hlink: String = "hlink",
            opt private: Option<bool> = "priv",
            opt mrel: Option<String> = "mrel",
            opt frel: Option<String> = "frel",
        }
        children {
            many citationrefs: Vec<HandleRef> = "citationref",
            many noterefs: Vec<HandleRef> = "noteref",
        }
    }
}
