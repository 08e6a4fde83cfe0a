mod header;
mod template;
