//! Provides ready to use [`NamedNodeRef`](oxrdf::NamedNodeRef)s for the
//! vocabularies consumed by the solver.

pub mod tree {
    //! [TREE](https://treecg.github.io/specification/) hypermedia vocabulary.
    use oxrdf::NamedNodeRef;

    /// Links a node or collection to one of its relations.
    pub const RELATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/tree#relation");
    /// The target page of a relation.
    pub const NODE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/tree#node");
    /// The predicate path connecting collection members to the compared value.
    pub const PATH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/tree#path");
    /// The boundary value of a relation.
    pub const VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/tree#value");
    /// The number of members remaining behind the relation's target.
    pub const REMAINING_ITEMS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/tree#remainingItems");

    /// Members behind the target are greater than the value.
    pub const GREATER_THAN_RELATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/tree#GreaterThanRelation");
    /// Members behind the target are greater than or equal to the value.
    pub const GREATER_THAN_OR_EQUAL_TO_RELATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/tree#GreaterThanOrEqualToRelation");
    /// Members behind the target are less than the value.
    pub const LESS_THAN_RELATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/tree#LessThanRelation");
    /// Members behind the target are less than or equal to the value.
    pub const LESS_THAN_OR_EQUAL_TO_RELATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/tree#LessThanOrEqualToRelation");
    /// Members behind the target are equal to the value.
    pub const EQUAL_TO_RELATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/tree#EqualToRelation");
    /// Deprecated spelling of [`EQUAL_TO_RELATION`] still found in published datasets.
    pub const EQUAL_THAN_RELATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/tree#EqualThanRelation");

    /// Members behind the target start with the value. Not usable for range reasoning.
    pub const PREFIX_RELATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/tree#PrefixRelation");
    /// Members behind the target contain the value. Not usable for range reasoning.
    pub const SUBSTRING_RELATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/tree#SubstringRelation");
    /// Members behind the target end with the value. Not usable for range reasoning.
    pub const SUFFIX_RELATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/tree#SuffixRelation");
    /// Members behind the target are contained in the value's geometry.
    pub const GEOSPATIALLY_CONTAINS_RELATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/tree#GeospatiallyContainsRelation");
}
