pub mod ffmpeg_capture;
pub mod minifb_display;
