mod property_peek_read;
