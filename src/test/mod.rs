mod test_populate;
