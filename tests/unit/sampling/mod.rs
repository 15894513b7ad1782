mod gaussian;
