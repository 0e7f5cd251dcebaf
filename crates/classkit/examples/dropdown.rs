//! Example: click-driven dropdown with outside-click dismissal

use classkit::{ops, ClassBinder, DomResult, DomTree, EventHub};

fn main() -> DomResult<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut tree = DomTree::new();
    let menu = tree.create_element("ul");
    let button = tree.create_element("button");
    let elsewhere = tree.create_element("div");
    tree.append_child(tree.root(), menu)?;
    tree.append_child(tree.root(), button)?;
    tree.append_child(tree.root(), elsewhere)?;

    let mut hub = EventHub::new();
    let binder = ClassBinder::new(menu, "open");
    binder.add_class_on_event(&mut hub, &[button], 0, "click");
    let dismiss = binder.remove_class_on_outside_click(&mut hub, button);

    // clicking the button opens the menu on the next tick
    hub.dispatch(&mut tree, "click", button)?;
    hub.tick(&mut tree, 0)?;
    println!("after button click: {:?}", ops::all_classes(&tree, menu)?);

    // clicking anywhere else closes it immediately
    hub.dispatch(&mut tree, "click", elsewhere)?;
    println!("after outside click: {:?}", ops::all_classes(&tree, menu)?);

    hub.remove_listener(dismiss);
    Ok(())
}
