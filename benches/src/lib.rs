// крейт содержит только бенчмарки, см. benches/
