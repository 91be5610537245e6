// Web-side wiring constants.

// Host element the page is mounted into
pub const MOUNT_ID: &str = "app";

// DOM event names
pub const EV_POINTER_MOVE: &str = "pointermove";
pub const EV_MOUSE_ENTER: &str = "mouseenter";
pub const EV_MOUSE_LEAVE: &str = "mouseleave";
pub const EV_SCROLL: &str = "scroll";
pub const EV_RESIZE: &str = "resize";
pub const EV_CLICK: &str = "click";
pub const EV_SUBMIT: &str = "submit";

// Selector for scroll-tracked elements
pub const TRACKED_SELECTOR: &str = "[data-track]";
