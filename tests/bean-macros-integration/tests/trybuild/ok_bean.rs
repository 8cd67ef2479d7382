use bean_macros::Bean;
use registry_abstractions::ContainerExt;
use registry_common::{Bean, BeanRef};
use registry_impl::DefaultContainer;

pub trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

#[derive(Bean)]
#[bean(class = "English", provides(Greeter))]
struct EnglishGreeter;

impl Greeter for EnglishGreeter {
    fn greet(&self) -> String {
        "Hello".to_string()
    }
}

fn main() {
    assert_eq!(EnglishGreeter::class_name(), "English");

    let container = DefaultContainer::from_beans([BeanRef::new(EnglishGreeter)]);
    let greeter = container.get_required::<dyn Greeter>().unwrap();
    assert_eq!(greeter.greet(), "Hello");
}
