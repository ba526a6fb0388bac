use super::{Address, HandleRef, Url};

gramps_element! {
    /// A repository such as an archive or library.
    pub struct Repository {
        attributes {
            opt id: Option<String> = "id",
            req handle: String = "handle",
            opt private: Option<bool> = "priv",
            req change: String = "change",
        }
        children {
            one rname: String = "rname",
            one r#type: String = "type",
            many addresses: Vec<Address> = "address",
            many urls: Vec<Url> = "url",
            many noterefs: Vec<HandleRef> = "noteref",
            many tagrefs: Vec<HandleRef> = "tagref",
        }
    }
}
