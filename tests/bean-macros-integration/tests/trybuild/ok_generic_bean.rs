use bean_macros::Bean;
use registry_common::{Bean, BeanRef};

mod api {
    pub trait Holder: Send + Sync {
        fn size(&self) -> usize;
    }
}

#[derive(Bean)]
#[bean(provides(api::Holder))]
struct Slot<T: Send + Sync + 'static> {
    items: Vec<T>,
}

impl<T: Send + Sync + 'static> api::Holder for Slot<T> {
    fn size(&self) -> usize {
        self.items.len()
    }
}

fn main() {
    assert_eq!(Slot::<u8>::class_name(), "Slot");

    let bean = BeanRef::new(Slot { items: vec![1u8, 2, 3] });
    let holder = bean.view::<dyn api::Holder>().unwrap();
    assert_eq!(holder.size(), 3);
}
