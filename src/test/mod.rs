mod test_undo;
