mod test_relay_to_unknown_target;
