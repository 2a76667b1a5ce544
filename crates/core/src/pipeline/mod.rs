pub mod anonymize_stream_use_case;
