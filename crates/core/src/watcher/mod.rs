pub mod on_record_written;
