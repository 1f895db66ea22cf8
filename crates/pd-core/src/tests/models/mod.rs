mod color_tag;
mod profile;
mod session;
