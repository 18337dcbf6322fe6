mod popup_view;

pub use popup_view::PopupView;
