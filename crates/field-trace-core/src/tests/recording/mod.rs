mod implement_width;
mod record;
