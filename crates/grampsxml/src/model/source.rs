use super::{HandleRef, ObjRef, RepoRef, SrcAttribute};

gramps_element! {
    pub struct Source {
        attributes {
            opt id: Option<String> = "id",
            req handle: String = "handle",
            opt private: Option<bool> = "priv",
            req change: String = "change",
        }
        children {
            opt stitle: Option<String> = "stitle",
            opt sauthor: Option<String> = "sauthor",
            opt spubinfo: Option<String> = "spubinfo",
            opt sabbrev: Option<String> = "sabbrev",
            many noterefs: Vec<HandleRef> = "noteref",
            many objrefs: Vec<ObjRef> = "objref",
            many srcattributes: Vec<SrcAttribute> = "srcattribute",
            many reporefs: Vec<RepoRef> = "reporef",
            many tagrefs: Vec<HandleRef> = "tagref",
        }
    }
}
